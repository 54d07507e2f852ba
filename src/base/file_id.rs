/// Interned identifier for a source file.
///
/// The transformer never opens files itself (see crate-level Non-goals); a
/// `FileId` is just the handle the host hands back to us so diagnostics can
/// name a file without the core owning any path-resolution logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(pub u32);

impl FileId {
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    pub fn index(self) -> u32 {
        self.0
    }
}
