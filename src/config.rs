use clap::Parser;
use std::net::SocketAddr;

/// Luxury property listing API
#[derive(Debug, Clone, Parser)]
#[command(version, about)]
pub struct Args {
    /// Address to listen on
    #[arg(long, env = "LUXE_BIND", default_value = "0.0.0.0:5000")]
    pub bind: SocketAddr,

    /// Log filter, in `RUST_LOG` syntax
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log: String,
}
