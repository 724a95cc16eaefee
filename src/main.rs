//! Fixed demonstration: configure a request builder and print its internal
//! state. No request is sent.

use std::time::Duration;

use reqopt::options::{with_address, with_content_type, with_timeout};
use reqopt::Builder;

fn main() -> anyhow::Result<()> {
    reqopt::logging::init();

    let builder = Builder::from_options([
        with_address("https://yakuter.com"),
        with_timeout(Duration::from_secs(30)),
        with_content_type("application/json"),
    ])?;

    println!("{:#?}", builder);
    Ok(())
}
