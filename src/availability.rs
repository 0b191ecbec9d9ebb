use crate::error::{HarnessError, HarnessResult};

/// Pre-flight check that the page answers over plain HTTP before a browser
/// is pointed at it. Anything other than a 200 response classifies as an
/// environment error, not an assertion failure.
pub fn check_available(url: &str) -> HarnessResult<()> {
    let resp = reqwest::blocking::get(url).map_err(HarnessError::Unreachable)?;
    let status = resp.status().as_u16();
    if status == 200 {
        Ok(())
    } else {
        Err(HarnessError::Availability {
            status,
        })
    }
}
