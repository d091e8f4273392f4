pub mod ping;

pub use ping::PingRunnerPlugin;
