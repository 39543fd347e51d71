/// Reserved document field holding the document identifier.
pub const DOC_ID_FIELD: &str = "_id";
