use clap::Parser;
use tripmap::app::TripCliArguments;

fn main() {
    env_logger::init();
    log::info!("starting tripmap at {}", chrono::Local::now().to_rfc3339());
    let args = TripCliArguments::parse();
    match args.op.run() {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running tripmap: {e}");
            std::process::exit(1);
        }
    }
}
