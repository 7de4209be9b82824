use clap::Parser;
use ecoroute::app::{EcorouteApp, EcorouteAppError};

fn main() -> Result<(), EcorouteAppError> {
    env_logger::init();
    let args = EcorouteApp::parse();
    args.op.run()
}
