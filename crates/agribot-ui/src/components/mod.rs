pub(crate) mod metrics;
pub(crate) mod modal;
pub(crate) mod pagination;
pub(crate) mod search;
pub(crate) mod shell;
pub(crate) mod status;
pub(crate) mod toast;
