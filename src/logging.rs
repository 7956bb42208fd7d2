use std::io;

use tracing::Level;

/// Installs a stderr subscriber so stdout carries only program output.
/// A second call keeps the subscriber already installed.
pub fn init(level: Level) {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        tracing::debug!(%err, "subscriber already installed, keeping it");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        init(Level::WARN);
        init(Level::DEBUG);
        tracing::debug!("still alive");
    }
}
