//! Per-operation loading and error tracking
//!
//! Every engine operation kind has its own [`OperationStatus`], so a failing
//! detail fetch cannot clobber the error slot of a list fetch running at the
//! same time. The whole board lives in a `watch` channel and consumers
//! re-render from [`StatusSnapshot`]s.
//!
//! # Lifecycle of one call
//!
//! ```text
//! Idle ──begin──▶ Loading ──succeed/fail──▶ Idle (last outcome + error kept)
//! ```
//!
//! Starting a call clears the error of its own kind only. Overlapping calls
//! of one kind are counted; the kind stays `Loading` until the last finishes.

use std::fmt;

use tokio::sync::watch;

use vidsync_core::ports::ApiError;

// ============================================================================
// OperationKind
// ============================================================================

/// The six tracked engine operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    ListVideos,
    GetVideo,
    ListComments,
    CreateVideo,
    EditVideo,
    AddComment,
}

impl OperationKind {
    /// Every kind, in board order
    pub const ALL: [OperationKind; 6] = [
        OperationKind::ListVideos,
        OperationKind::GetVideo,
        OperationKind::ListComments,
        OperationKind::CreateVideo,
        OperationKind::EditVideo,
        OperationKind::AddComment,
    ];

    fn index(self) -> usize {
        match self {
            OperationKind::ListVideos => 0,
            OperationKind::GetVideo => 1,
            OperationKind::ListComments => 2,
            OperationKind::CreateVideo => 3,
            OperationKind::EditVideo => 4,
            OperationKind::AddComment => 5,
        }
    }

    /// User-facing message recorded when a call of this kind fails
    pub fn failure_message(self) -> &'static str {
        match self {
            OperationKind::ListVideos => "Failed to fetch videos",
            OperationKind::GetVideo => "Failed to fetch video detail",
            OperationKind::ListComments => "Failed to fetch comments",
            OperationKind::CreateVideo => "Failed to add video",
            OperationKind::EditVideo => "Failed to edit video",
            OperationKind::AddComment => "Failed to post comment",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperationKind::ListVideos => "list_videos",
            OperationKind::GetVideo => "get_video",
            OperationKind::ListComments => "list_comments",
            OperationKind::CreateVideo => "create_video",
            OperationKind::EditVideo => "edit_video",
            OperationKind::AddComment => "add_comment",
        };
        f.write_str(name)
    }
}

// ============================================================================
// OperationFailure
// ============================================================================

/// What went wrong, coarsely
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Non-2xx status or network failure
    Transport,
    /// The server answered 2xx with a payload of the wrong shape
    Decode,
}

/// A failure recorded in an operation's error slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl OperationFailure {
    /// Builds the failure for an [`ApiError`] raised by a call of `op`
    ///
    /// Transport failures carry the operation's message unchanged; decode
    /// failures append `": malformed response"`.
    pub fn from_api(op: OperationKind, error: &ApiError) -> Self {
        if error.is_decode() {
            Self {
                kind: FailureKind::Decode,
                message: format!("{}: malformed response", op.failure_message()),
            }
        } else {
            Self {
                kind: FailureKind::Transport,
                message: op.failure_message().to_string(),
            }
        }
    }
}

impl fmt::Display for OperationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

// ============================================================================
// OperationStatus / StatusSnapshot
// ============================================================================

/// Whether any call of a kind is running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
}

/// How the most recently finished call of a kind ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    Failed,
}

/// Status of one operation kind
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OperationStatus {
    pub phase: Phase,
    /// Calls of this kind currently running
    pub in_flight: u32,
    /// Last failure, kept until the next call of this kind starts
    pub error: Option<OperationFailure>,
    pub last_outcome: Option<Outcome>,
}

impl OperationStatus {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }
}

/// Status of every operation kind at one point in time
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusSnapshot {
    slots: [OperationStatus; 6],
}

impl StatusSnapshot {
    #[must_use]
    pub fn get(&self, kind: OperationKind) -> &OperationStatus {
        &self.slots[kind.index()]
    }

    /// True while a call of any kind is running
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.slots.iter().any(OperationStatus::is_loading)
    }

    /// Iterates over `(kind, status)` pairs in board order
    pub fn iter(&self) -> impl Iterator<Item = (OperationKind, &OperationStatus)> {
        OperationKind::ALL
            .iter()
            .map(move |kind| (*kind, self.get(*kind)))
    }

    fn slot_mut(&mut self, kind: OperationKind) -> &mut OperationStatus {
        &mut self.slots[kind.index()]
    }
}

// ============================================================================
// StatusBoard
// ============================================================================

/// Observable board of operation statuses
#[derive(Debug)]
pub struct StatusBoard {
    state: watch::Sender<StatusSnapshot>,
}

impl StatusBoard {
    pub fn new() -> Self {
        let (state, _) = watch::channel(StatusSnapshot::default());
        Self { state }
    }

    /// Marks a call of `kind` as started and clears that kind's error
    ///
    /// The returned ticket must be resolved with [`OperationTicket::succeed`]
    /// or [`OperationTicket::fail`]; dropping it unresolved only ends the
    /// loading state.
    pub fn begin(&self, kind: OperationKind) -> OperationTicket<'_> {
        self.state.send_modify(|board| {
            let slot = board.slot_mut(kind);
            slot.in_flight += 1;
            slot.phase = Phase::Loading;
            slot.error = None;
        });
        OperationTicket {
            board: self,
            kind,
            resolved: false,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> StatusSnapshot {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn status(&self, kind: OperationKind) -> OperationStatus {
        self.state.borrow().get(kind).clone()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading()
    }

    #[must_use]
    pub fn last_error(&self, kind: OperationKind) -> Option<OperationFailure> {
        self.state.borrow().get(kind).error.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<StatusSnapshot> {
        self.state.subscribe()
    }

    fn finish(&self, kind: OperationKind, result: Option<Result<(), OperationFailure>>) {
        self.state.send_modify(|board| {
            let slot = board.slot_mut(kind);
            slot.in_flight = slot.in_flight.saturating_sub(1);
            if slot.in_flight == 0 {
                slot.phase = Phase::Idle;
            }
            match result {
                Some(Ok(())) => slot.last_outcome = Some(Outcome::Succeeded),
                Some(Err(failure)) => {
                    slot.last_outcome = Some(Outcome::Failed);
                    slot.error = Some(failure);
                }
                None => {}
            }
        });
    }
}

impl Default for StatusBoard {
    fn default() -> Self {
        Self::new()
    }
}

/// One running call on a [`StatusBoard`]
#[must_use = "an unresolved ticket records no outcome"]
#[derive(Debug)]
pub struct OperationTicket<'a> {
    board: &'a StatusBoard,
    kind: OperationKind,
    resolved: bool,
}

impl OperationTicket<'_> {
    pub fn succeed(mut self) {
        self.resolved = true;
        self.board.finish(self.kind, Some(Ok(())));
    }

    pub fn fail(mut self, failure: OperationFailure) {
        self.resolved = true;
        self.board.finish(self.kind, Some(Err(failure)));
    }
}

impl Drop for OperationTicket<'_> {
    fn drop(&mut self) {
        if !self.resolved {
            self.board.finish(self.kind, None);
        }
    }
}
