use std::fmt;

use super::SkipList;
use crate::types::Position;

/// Per-level key dump, produced by [`SkipList::display_keys`].
///
/// ```text
/// Level 0: (-inf) -> 14 -> 23 -> 34 -> 42
/// Level 1: (-inf) -> 23 -> 42
/// ```
pub struct DisplayKeys<'a, K, V, G> {
    pub(super) list: &'a SkipList<K, V, G>,
}

/// Per-level `(key, value)` dump, produced by [`SkipList::display_entries`].
pub struct DisplayEntries<'a, K, V, G> {
    pub(super) list: &'a SkipList<K, V, G>,
}

impl<K: fmt::Display, V, G> fmt::Display for DisplayKeys<'_, K, V, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self.list, f, "(-inf)", |f, key, _| write!(f, "{key}"))
    }
}

impl<K: fmt::Display, V: fmt::Display, G> fmt::Display for DisplayEntries<'_, K, V, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self.list, f, "(-inf, -)", |f, key, value| {
            write!(f, "({key}, {value})")
        })
    }
}

fn render<K, V, G>(
    list: &SkipList<K, V, G>,
    f: &mut fmt::Formatter<'_>,
    sentinel: &str,
    mut entry: impl FnMut(&mut fmt::Formatter<'_>, &K, &V) -> fmt::Result,
) -> fmt::Result {
    for level in 0..=list.top_level {
        write!(f, "Level {level}: {sentinel}")?;
        let mut link = list.next(Position::Head, level);
        while let Some(id) = link {
            let node = list.arena.get(id);
            f.write_str(" -> ")?;
            entry(f, &node.key, &node.value)?;
            link = node.forward[level];
        }
        writeln!(f)?;
    }
    Ok(())
}
