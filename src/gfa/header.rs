use bstr::{BString, ByteVec};

use super::error::VersionError;

/// The header line of a GFA graph, along with the graph's comment
/// lines. There is exactly one per GFA.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    version: u32,
    comments: Vec<BString>,
}

impl Default for Header {
    fn default() -> Self {
        Header {
            version: 0,
            comments: Vec::new(),
        }
    }
}

impl Header {
    pub const TYPE: &'static str = "H";

    pub fn new() -> Self {
        Default::default()
    }

    /// Set the GFA version number. Only GFA1 is supported, and the
    /// version can only be set once.
    pub fn set_version(&mut self, version: u32) -> Result<(), VersionError> {
        if self.version != 0 {
            return Err(VersionError::AlreadySet);
        }
        match version {
            0 => Err(VersionError::AlreadySet),
            1 => {
                self.version = version;
                Ok(())
            }
            2 => Err(VersionError::Unsupported(version)),
            _ => Err(VersionError::OutOfRange(version)),
        }
    }

    /// The version number, 0 if it was never set
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Store a comment. The comment is kept with its "#\t" prefix so
    /// it can be written back as is.
    pub fn add_comment<T: AsRef<[u8]>>(&mut self, comment: T) {
        let mut line = BString::from("#\t");
        line.push_str(comment.as_ref());
        self.comments.push(line);
    }

    pub fn comments(&self) -> &[BString] {
        &self.comments
    }

    /// The formatted header line
    pub fn header_line(&self) -> String {
        format!("{}\tVN:Z:{}", Self::TYPE, self.version)
    }

    /// All comment lines, joined by newlines. The bytes are returned
    /// as stored.
    pub fn comment_lines(&self) -> BString {
        bstr::join("\n", &self.comments).into()
    }
}
