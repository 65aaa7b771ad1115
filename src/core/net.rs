// src/core/net.rs

// Blocking HTTPS via ureq. One agent per call; we make at most two requests
// per refresh (listing page + archive).

use std::{
    error::Error,
    fs::{self, File},
    io::{BufWriter, Read, Write},
    path::Path,
    time::Duration,
};

use ureq::Agent;

use crate::config::consts::{NET_TIMEOUT_SECS, USER_AGENT};
use crate::progress::Progress;

fn agent() -> Agent {
    let config = Agent::config_builder()
        .timeout_global(Some(Duration::from_secs(NET_TIMEOUT_SECS)))
        .build();
    config.into()
}

/// GET `url` and return the body as text. Non-2xx is an error.
pub fn get_text(url: &str) -> Result<String, Box<dyn Error>> {
    let response = agent()
        .get(url)
        .header("User-Agent", USER_AGENT)
        .call()?;
    let body = response.into_body().read_to_string()?;
    Ok(body)
}

/// Stream `url` into `target`. Bytes land in `<target>.part` first and are
/// renamed into place only once complete.
pub fn download(
    url: &str,
    target: &Path,
    mut progress: Option<&mut dyn Progress>,
) -> Result<u64, Box<dyn Error>> {
    let part = target.with_extension("part");
    if part.exists() {
        let _ = fs::remove_file(&part);
    }

    // Archive downloads are large; no overall deadline, only the connect/read ones
    let config = Agent::config_builder()
        .timeout_connect(Some(Duration::from_secs(NET_TIMEOUT_SECS)))
        .timeout_recv_body(None)
        .build();
    let agent: Agent = config.into();

    let response = agent
        .get(url)
        .header("User-Agent", USER_AGENT)
        .call()?;
    let total = response.body().content_length();
    if let Some(p) = progress.as_deref_mut() {
        p.begin(total);
    }

    let mut reader = response.into_body().into_reader();
    let mut out = BufWriter::new(File::create(&part)?);
    let mut buf = vec![0u8; 64 * 1024];
    let mut done = 0u64;

    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 { break; }
        out.write_all(&buf[..n])?;
        done += n as u64;
        if let Some(p) = progress.as_deref_mut() {
            p.advance(done);
        }
    }
    out.flush()?;
    drop(out);

    fs::rename(&part, target)?;
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    logf!("Net: Downloaded {} bytes → {}", done, target.display());
    Ok(done)
}
