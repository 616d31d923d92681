pub(crate) mod entries;
pub(crate) mod form;
pub(crate) mod months;
pub(crate) mod totals;
