use mote::Showcase;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mote=info,wgpu=warn")),
        )
        .init();

    if let Err(e) = Showcase::new().run() {
        tracing::error!(target: "mote", error = %e, "showcase failed");
        std::process::exit(1);
    }
}
