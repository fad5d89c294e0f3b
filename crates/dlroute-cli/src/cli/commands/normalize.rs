//! `dlroute normalize <url>`.

use dlroute_core::normalize;

pub fn run_normalize(url: &str) {
    println!("{}", normalize(url));
}
