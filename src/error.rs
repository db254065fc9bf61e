use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to write report to stdout")]
    Output(#[from] io::Error),
}
