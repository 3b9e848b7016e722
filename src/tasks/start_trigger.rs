//! Start trigger background task

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, warn};

use super::ScreenHandle;

/// Background task turning each input line into one start button tap.
///
/// Ends at end of input, on a read error, or once the screen loop is gone.
pub async fn start_trigger_task<R>(input: R, screen: ScreenHandle)
where
    R: AsyncBufRead + Unpin,
{
    info!("Press Enter to start the timer");

    let mut lines = input.lines();
    loop {
        match lines.next_line().await {
            Ok(Some(_)) => {
                debug!("Start tapped");
                if let Err(e) = screen.press_start() {
                    debug!("{}", e);
                    break;
                }
            }
            Ok(None) => {
                debug!("Start trigger input closed");
                break;
            }
            Err(e) => {
                warn!("Failed to read start trigger input: {}", e);
                break;
            }
        }
    }
}
