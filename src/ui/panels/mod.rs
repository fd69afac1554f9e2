pub(crate) mod form;
pub(crate) mod history;
pub(crate) mod summary;
