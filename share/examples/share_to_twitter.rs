//! Share a line of text to Twitter, falling back to the browser.
//!
//! ```sh
//! RUST_LOG=debug cargo run -p socialkit-share --example share_to_twitter -- "hello world"
//! ```

use socialkit_share::{Destination, ShareOutcome, ShareRequest};

fn main() {
    env_logger::init();

    let content = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "hello world".to_owned());
    let request = ShareRequest::new(Destination::Twitter)
        .content(content)
        .open_browser(true);

    match socialkit_share::share(&request) {
        ShareOutcome::Launched { target } => println!("launched {target:?}"),
        ShareOutcome::Failed { kind, message } => {
            eprintln!("{}: {message}", kind.code());
            std::process::exit(1);
        }
    }
}
