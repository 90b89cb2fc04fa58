/// An approved dashboard comment, ready for insertion into the
/// `gbads_comments` table.
///
/// Anonymous comments (submitted with `isPublic = false`) carry no name or
/// email; those columns are stored as SQL NULL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRecord {
    pub created: String,
    pub approved: String,
    pub dashboard: String,
    pub table: String,
    pub subject: String,
    pub message: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub is_public: bool,
    pub reviewer: String,
}
