use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Mutations requested by key handlers, applied by the event loop.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Action {
    SubmitNewClass,
    RemoveClass { id: String },
    SaveNotes,
    RefreshActive,
}

pub(super) type ActionTx = UnboundedSender<Action>;
pub(super) type ActionRx = UnboundedReceiver<Action>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}
