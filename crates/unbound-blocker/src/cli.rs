use std::path::PathBuf;

use clap::Parser;

/// Use unbound(8) as a DNS blocker.
///
/// Read one blocklist URL per line from SOURCES, retrieve its contents and parse it as a
/// blocklist in the hosts(5) format. The obtained domains are passed to unbound-control(8)
/// to always resolve them to the null address.
#[derive(Parser, Debug)]
#[command(version, name = "unbound-blocker")]
pub struct Args {
    /// File with one blocklist URL per line
    #[arg(value_name = "SOURCES", value_parser = existing_file)]
    pub sources: PathBuf,
    /// Path to unbound-control(8)
    #[arg(
        short,
        long,
        value_name = "PATH",
        default_value = "/usr/sbin/unbound-control",
        value_parser = executable_file
    )]
    pub unbound_control: PathBuf,
    /// Whitelist file with one domain per line
    #[arg(short, long, value_name = "PATH", value_parser = existing_file)]
    pub whitelist: Option<PathBuf>,
    /// Timeout for retrieving a single blocklist source
    #[arg(
        short('t'),
        long,
        value_name = "SECONDS",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..=300)
    )]
    pub request_timeout: u64,
}

fn existing_file(raw: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(raw);
    let metadata = std::fs::metadata(&path)
        .map_err(|e| format!("path '{}' is not accessible: {}", raw, e))?;

    if !metadata.is_file() {
        return Err(format!("path '{}' is not a file", raw));
    }

    Ok(path)
}

fn executable_file(raw: &str) -> Result<PathBuf, String> {
    let path = existing_file(raw)?;

    if !is_executable(&path) {
        return Err(format!("file '{}' is not executable", raw));
    }

    Ok(path)
}

#[cfg(unix)]
fn is_executable(path: &std::path::Path) -> bool {
    use std::os::unix::fs::PermissionsExt as _;

    std::fs::metadata(path).is_ok_and(|metadata| metadata.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(_path: &std::path::Path) -> bool {
    true
}
