//! Translation keys generated from the bundled catalogs by `build.rs`.
//!
//! The build fails when the catalogs disagree on their key sets, so a
//! [`Key`] always resolves in every locale.

include!(concat!(env!("OUT_DIR"), "/translation_keys.rs"));

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_map_to_dotted_paths() {
        assert_eq!(Key::NavHome.as_str(), "nav.home");
        assert_eq!(Key::StoriesCommentsTitle.as_str(), "stories.comments.title");
        assert_eq!(Key::StoriesReadingTime.to_string(), "stories.reading_time");
    }

    #[test]
    fn key_list_is_sorted_and_unique() {
        let paths: Vec<_> = Key::ALL.iter().map(|k| k.as_str()).collect();
        let mut sorted = paths.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(paths, sorted);
    }
}
