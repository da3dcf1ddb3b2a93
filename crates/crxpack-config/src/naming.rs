//! Output naming rules for entry bundles and split chunks.

use std::path::Path;

/// Chunk name the bundler gives to the entry chunk of a target
pub const MAIN_CHUNK: &str = "main";

/// Separator between merged chunk names in a split chunk name
pub const CHUNK_NAME_SEPARATOR: char = '~';

/// File name for a chunk of a target whose entry bundle is `bundle_name`.
///
/// ```
/// use crxpack_config::output_filename;
///
/// assert_eq!(output_filename("main", "popup.js"), "popup.js");
/// assert_eq!(output_filename("vendors-popup", "popup.js"), "vendors-popup.js");
/// ```
pub fn output_filename(chunk_name: &str, bundle_name: &str) -> String {
    if chunk_name == MAIN_CHUNK {
        bundle_name.to_string()
    } else {
        format!("{chunk_name}.js")
    }
}

/// Name of a shared chunk produced by merging `chunk_names` under `cache_group_key`.
///
/// ```
/// use crxpack_config::split_chunk_name;
///
/// assert_eq!(split_chunk_name("vendors", &["popup", "content"]), "vendors-popup~content");
/// ```
pub fn split_chunk_name<S: AsRef<str>>(cache_group_key: &str, chunk_names: &[S]) -> String {
    let mut name = String::from(cache_group_key);
    name.push('-');
    for (i, chunk) in chunk_names.iter().enumerate() {
        if i > 0 {
            name.push(CHUNK_NAME_SEPARATOR);
        }
        name.push_str(chunk.as_ref());
    }
    name
}

/// Output name for a discovered custom script: `custom/{stem}.js`
pub fn custom_output_name(entry: &Path) -> Option<String> {
    let stem = entry.file_stem()?.to_str()?;
    Some(format!("custom/{stem}.js"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_chunk_uses_bundle_name() {
        assert_eq!(output_filename(MAIN_CHUNK, "content-script.js"), "content-script.js");
        assert_eq!(output_filename("main", "custom/Foo.js"), "custom/Foo.js");
    }

    #[test]
    fn other_chunks_use_their_own_name() {
        assert_eq!(output_filename("vendors", "popup.js"), "vendors.js");
        assert_eq!(output_filename("Main", "popup.js"), "Main.js");
    }

    #[test]
    fn split_chunk_joins_with_tilde() {
        assert_eq!(split_chunk_name("default", &["a"]), "default-a");
        assert_eq!(split_chunk_name("vendors", &["a", "b", "c"]), "vendors-a~b~c");
        let empty: [&str; 0] = [];
        assert_eq!(split_chunk_name("vendors", &empty), "vendors-");
    }

    #[test]
    fn custom_output_drops_extension() {
        assert_eq!(
            custom_output_name(Path::new("/project/ts/Custom/Tweaks.ts")).as_deref(),
            Some("custom/Tweaks.js")
        );
        assert_eq!(
            custom_output_name(Path::new("ts/Custom/my.helper.ts")).as_deref(),
            Some("custom/my.helper.js")
        );
    }
}
