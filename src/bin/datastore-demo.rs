use std::io;

use datastore::bootstrap::usage_demo;
use datastore::Result;

fn main() -> Result<()> {
    datastore::logger::init_logger();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    usage_demo(&mut out)?;
    Ok(())
}
