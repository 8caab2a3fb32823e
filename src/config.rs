use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Blueprints HTTP API")]
pub struct Config {
    /// Address to bind the HTTP server to
    #[clap(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Port to listen on
    #[clap(short, long, default_value = "8080")]
    pub port: u16,

    /// Preload the store with sample blueprints
    #[clap(long)]
    pub seed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::parse_from(["blueprints-api"]);
        assert_eq!(config.address, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert!(!config.seed);
    }

    #[test]
    fn flags_override_defaults() {
        let config =
            Config::parse_from(["blueprints-api", "-a", "0.0.0.0", "--port", "9000", "--seed"]);
        assert_eq!(config.address, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert!(config.seed);
    }
}
