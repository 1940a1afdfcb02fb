//! Video Progress Tracking
//!
//! The playlist detail page shows every video with a status selector. A
//! change is shown right away and sent to the backend as a single PUT; the
//! board remembers the last confirmed status so a rejected update can be
//! rolled back.

use crate::api::{Endpoint, StatusRequest};
use crate::model::{Id, Video, VideoStatus};

/// Backend agreement for one video's shown status
#[derive(Debug, Clone, PartialEq)]
pub enum SyncState {
    /// Shown status matches what the backend stored
    Confirmed,
    /// Update in flight; `previous` is the last confirmed status
    Pending { previous: VideoStatus },
    /// Update rejected; the shown status was reverted to `previous`
    Failed {
        previous: VideoStatus,
        message: String,
    },
}

/// The request to issue for one status change
#[derive(Debug, Clone, PartialEq)]
pub struct StatusUpdate {
    pub video_id: Id,
    /// Per-video order of issue; only the newest request may settle the row
    pub seq: u64,
    pub endpoint: Endpoint,
    pub body: StatusRequest,
}

#[derive(Debug, Clone, PartialEq)]
struct Row {
    video: Video,
    sync: SyncState,
    /// Last status the backend accepted
    confirmed: VideoStatus,
    /// Sequence of the request that set `confirmed`
    confirmed_seq: u64,
    /// Sequence of the newest request issued
    latest_seq: u64,
}

impl Row {
    fn new(video: Video) -> Self {
        Self {
            confirmed: video.status,
            video,
            sync: SyncState::Confirmed,
            confirmed_seq: 0,
            latest_seq: 0,
        }
    }
}

/// Videos of one playlist with their sync state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoBoard {
    rows: Vec<Row>,
}

impl VideoBoard {
    pub fn new(videos: Vec<Video>) -> Self {
        Self {
            rows: videos.into_iter().map(Row::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn videos(&self) -> impl Iterator<Item = &Video> {
        self.rows.iter().map(|r| &r.video)
    }

    pub fn get(&self, id: &Id) -> Option<&Video> {
        self.row(id).map(|r| &r.video)
    }

    pub fn sync_state(&self, id: &Id) -> Option<&SyncState> {
        self.row(id).map(|r| &r.sync)
    }

    /// Apply a status change locally and return the PUT to send.
    ///
    /// Returns `None` for unknown videos and for a status equal to the one
    /// already shown, so each user action produces at most one request.
    pub fn begin(&mut self, id: &Id, status: VideoStatus) -> Option<StatusUpdate> {
        let row = self.row_mut(id)?;
        if row.video.status == status {
            return None;
        }

        row.latest_seq += 1;
        row.video.status = status;
        row.sync = SyncState::Pending {
            previous: row.confirmed,
        };

        tracing::debug!(video_id = %id, status = %status, seq = row.latest_seq, "status change queued");

        Some(StatusUpdate {
            video_id: id.clone(),
            seq: row.latest_seq,
            endpoint: Endpoint::update_video(id),
            body: StatusRequest { status },
        })
    }

    /// The backend accepted `update`.
    ///
    /// The confirmed status only moves forward in issue order. The row is
    /// settled only when `update` is the newest request for the video.
    pub fn confirm(&mut self, update: &StatusUpdate) {
        let Some(row) = self.row_mut(&update.video_id) else {
            return;
        };
        if update.seq > row.confirmed_seq {
            row.confirmed = update.body.status;
            row.confirmed_seq = update.seq;
        }

        if update.seq == row.latest_seq {
            row.video.status = row.confirmed;
            row.sync = SyncState::Confirmed;
            return;
        }

        // A newer request is still in flight or already failed
        match &mut row.sync {
            SyncState::Pending { previous } => *previous = row.confirmed,
            SyncState::Failed { previous, .. } => {
                *previous = row.confirmed;
                row.video.status = row.confirmed;
            }
            SyncState::Confirmed => {}
        }
    }

    /// The backend rejected `update`.
    ///
    /// When it is the newest request the shown status goes back to the last
    /// confirmed one; a stale rejection leaves the row alone.
    pub fn fail(&mut self, update: &StatusUpdate, message: impl Into<String>) {
        let Some(row) = self.row_mut(&update.video_id) else {
            return;
        };
        let message = message.into();
        tracing::warn!(video_id = %update.video_id, seq = update.seq, error = %message, "status update rejected");

        if update.seq != row.latest_seq {
            return;
        }
        row.video.status = row.confirmed;
        row.sync = SyncState::Failed {
            previous: row.confirmed,
            message,
        };
    }

    /// Videos matching the filter (`None` shows all), in fetch order
    pub fn filtered(&self, filter: Option<VideoStatus>) -> Vec<&Video> {
        self.videos()
            .filter(|v| filter.map_or(true, |status| v.status == status))
            .collect()
    }

    /// Completed count over total, for the page header
    pub fn completed(&self) -> (usize, usize) {
        let done = self
            .videos()
            .filter(|v| v.status == VideoStatus::Completed)
            .count();
        (done, self.rows.len())
    }

    fn row(&self, id: &Id) -> Option<&Row> {
        self.rows.iter().find(|r| &r.video.id == id)
    }

    fn row_mut(&mut self, id: &Id) -> Option<&mut Row> {
        self.rows.iter_mut().find(|r| &r.video.id == id)
    }
}

/// A transient message that clears itself after a delay.
///
/// Each `show` bumps a generation; `expire` only clears the message it was
/// issued for, so a timer from an older message cannot cut a newer one short.
#[derive(Debug, Clone, PartialEq)]
pub struct Flash<T> {
    current: Option<T>,
    generation: u64,
}

impl<T> Default for Flash<T> {
    fn default() -> Self {
        Self {
            current: None,
            generation: 0,
        }
    }
}

impl<T> Flash<T> {
    /// Show `value`; returns the generation to pass to `expire`
    pub fn show(&mut self, value: T) -> u64 {
        self.generation += 1;
        self.current = Some(value);
        self.generation
    }

    /// Clear the message if it is still the one from `generation`
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.current = None;
        true
    }

    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }
}

/// Parse the filter `<select>` value; "All" or anything unknown shows all
pub fn parse_filter(value: &str) -> Option<VideoStatus> {
    VideoStatus::parse(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: i64, status: VideoStatus) -> Video {
        Video {
            id: Id::Num(id),
            title: format!("Video {}", id),
            thumbnail: None,
            duration_seconds: 300,
            status,
            scheduled_date: None,
            youtube_url: format!("https://youtube.com/watch?v={}", id),
        }
    }

    fn board() -> VideoBoard {
        VideoBoard::new(vec![
            video(1, VideoStatus::NotStarted),
            video(2, VideoStatus::InProgress),
            video(3, VideoStatus::Completed),
        ])
    }

    #[test]
    fn test_begin_is_optimistic_and_issues_one_put() {
        let mut board = board();
        let update = board.begin(&Id::Num(1), VideoStatus::Completed).unwrap();

        assert_eq!(update.endpoint.path, "/calendar/video/1");
        assert_eq!(update.body.status, VideoStatus::Completed);
        assert_eq!(board.get(&Id::Num(1)).unwrap().status, VideoStatus::Completed);
        assert_eq!(
            board.sync_state(&Id::Num(1)),
            Some(&SyncState::Pending {
                previous: VideoStatus::NotStarted
            })
        );
    }

    #[test]
    fn test_unchanged_or_unknown_issues_nothing() {
        let mut board = board();
        assert!(board.begin(&Id::Num(2), VideoStatus::InProgress).is_none());
        assert!(board.begin(&Id::Num(99), VideoStatus::Completed).is_none());
        assert_eq!(board.sync_state(&Id::Num(2)), Some(&SyncState::Confirmed));
    }

    #[test]
    fn test_confirm() {
        let mut board = board();
        let update = board.begin(&Id::Num(2), VideoStatus::Completed).unwrap();
        board.confirm(&update);
        assert_eq!(board.sync_state(&Id::Num(2)), Some(&SyncState::Confirmed));
        assert_eq!(board.completed(), (2, 3));
    }

    #[test]
    fn test_fail_reverts_to_confirmed_status() {
        let mut board = board();
        let update = board.begin(&Id::Num(1), VideoStatus::InProgress).unwrap();
        board.fail(&update, "Video not found");

        assert_eq!(board.get(&Id::Num(1)).unwrap().status, VideoStatus::NotStarted);
        assert_eq!(
            board.sync_state(&Id::Num(1)),
            Some(&SyncState::Failed {
                previous: VideoStatus::NotStarted,
                message: "Video not found".into()
            })
        );

        // A retry after failure starts from the reverted status
        let update = board.begin(&Id::Num(1), VideoStatus::Completed);
        assert!(update.is_some());
        assert_eq!(
            board.sync_state(&Id::Num(1)),
            Some(&SyncState::Pending {
                previous: VideoStatus::NotStarted
            })
        );
    }

    #[test]
    fn test_overlapping_updates_first_confirmed_second_rejected() {
        let mut board = board();
        let first = board.begin(&Id::Num(1), VideoStatus::InProgress).unwrap();
        let second = board.begin(&Id::Num(1), VideoStatus::Completed).unwrap();
        assert!(second.seq > first.seq);

        board.confirm(&first);
        assert_eq!(board.get(&Id::Num(1)).unwrap().status, VideoStatus::Completed);
        assert_eq!(
            board.sync_state(&Id::Num(1)),
            Some(&SyncState::Pending {
                previous: VideoStatus::InProgress
            })
        );

        board.fail(&second, "Server error");
        assert_eq!(board.get(&Id::Num(1)).unwrap().status, VideoStatus::InProgress);
        assert_eq!(
            board.sync_state(&Id::Num(1)),
            Some(&SyncState::Failed {
                previous: VideoStatus::InProgress,
                message: "Server error".into()
            })
        );
    }

    #[test]
    fn test_overlapping_updates_first_rejected_second_confirmed() {
        let mut board = board();
        let first = board.begin(&Id::Num(1), VideoStatus::InProgress).unwrap();
        let second = board.begin(&Id::Num(1), VideoStatus::Completed).unwrap();

        board.fail(&first, "Server error");
        assert_eq!(board.get(&Id::Num(1)).unwrap().status, VideoStatus::Completed);
        assert!(matches!(
            board.sync_state(&Id::Num(1)),
            Some(SyncState::Pending { .. })
        ));

        board.confirm(&second);
        assert_eq!(board.get(&Id::Num(1)).unwrap().status, VideoStatus::Completed);
        assert_eq!(board.sync_state(&Id::Num(1)), Some(&SyncState::Confirmed));
    }

    #[test]
    fn test_late_confirm_does_not_roll_back_newer_confirm() {
        let mut board = board();
        let first = board.begin(&Id::Num(1), VideoStatus::InProgress).unwrap();
        let second = board.begin(&Id::Num(1), VideoStatus::Completed).unwrap();

        board.confirm(&second);
        board.confirm(&first);
        assert_eq!(board.get(&Id::Num(1)).unwrap().status, VideoStatus::Completed);
        assert_eq!(board.sync_state(&Id::Num(1)), Some(&SyncState::Confirmed));

        // A later rejection reverts to the newest accepted status
        let third = board.begin(&Id::Num(1), VideoStatus::NotStarted).unwrap();
        board.fail(&third, "nope");
        assert_eq!(board.get(&Id::Num(1)).unwrap().status, VideoStatus::Completed);
    }

    #[test]
    fn test_flash_ignores_stale_expiry() {
        let mut flash = Flash::default();
        let first = flash.show("Failed to update video.");
        let second = flash.show("Video not found");

        assert!(!flash.expire(first));
        assert_eq!(flash.current(), Some(&"Video not found"));

        assert!(flash.expire(second));
        assert_eq!(flash.current(), None);
    }

    #[test]
    fn test_filter() {
        let board = board();
        assert_eq!(board.filtered(None).len(), 3);

        let done: Vec<_> = board
            .filtered(Some(VideoStatus::Completed))
            .into_iter()
            .map(|v| v.id.clone())
            .collect();
        assert_eq!(done, vec![Id::Num(3)]);

        assert_eq!(parse_filter("All"), None);
        assert_eq!(parse_filter("In Progress"), Some(VideoStatus::InProgress));
    }

    #[test]
    fn test_empty_board() {
        let board = VideoBoard::default();
        assert!(board.is_empty());
        assert_eq!(board.completed(), (0, 0));
        assert!(board.filtered(Some(VideoStatus::Completed)).is_empty());
    }
}
