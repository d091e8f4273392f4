use std::ffi::OsString;

/// Raw command line. Nothing is parsed here: every argument belongs to ping, including
/// `-h`, `-?` and `--`, and non-UTF-8 arguments survive unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    pub ping_args: Vec<OsString>,
}

impl Args {
    pub fn from_env() -> Self {
        Self::from_args(std::env::args_os().skip(1))
    }

    pub fn from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self {
            ping_args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ping_args.is_empty()
    }
}
