//! Value mappers: caller-supplied overrides for specific cell values

/// Changes the visual representation of specific values.
///
/// Receives the stored bytes for a cell, or `None` when the cell is absent,
/// and returns `Some(display)` to override the default rendering or `None`
/// to fall through to it. Mappers are plain callbacks with no side effects;
/// they are handed to the renderer per call, never stored.
pub type ValueMapper = dyn Fn(Option<&[u8]>) -> Option<String>;

/// The stock mapper: absent cells render as `<deleted>` and values whose
/// leading byte is `0x00` as `<pending>` (a sentinel some pipelines write
/// before the real data arrives). Everything else falls through.
pub fn default_mapper(value: Option<&[u8]>) -> Option<String> {
    match value {
        None => Some("<deleted>".to_string()),
        Some(bytes) if bytes.first() == Some(&0x0) => Some("<pending>".to_string()),
        Some(_) => None,
    }
}
