use anyhow::{Context, Result};

pub(super) fn with_retries<T>(label: &str, mut f: impl FnMut() -> Result<T>) -> Result<T> {
    const ATTEMPTS: usize = 3;
    let mut last: Option<anyhow::Error> = None;
    for i in 0..ATTEMPTS {
        match f() {
            Ok(v) => return Ok(v),
            Err(err) => {
                last = Some(err);
                if i + 1 < ATTEMPTS {
                    std::thread::sleep(std::time::Duration::from_millis(200 * (1 << i)));
                }
            }
        }
    }
    Err(last
        .unwrap_or_else(|| anyhow::anyhow!("unknown error"))
        .context(label.to_string()))
}

pub(super) fn ensure_ok(
    resp: reqwest::blocking::Response,
    label: &str,
) -> Result<reqwest::blocking::Response> {
    if resp.status() == reqwest::StatusCode::UNAUTHORIZED {
        anyhow::bail!("unauthorized (access token invalid or expired)");
    }
    if resp.status() == reqwest::StatusCode::FORBIDDEN {
        anyhow::bail!("forbidden (check the token's gist scope or rate limits)");
    }
    resp.error_for_status()
        .with_context(|| format!("{} status", label))
}
