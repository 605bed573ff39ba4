//! Browse/search projection over the mediator's data.
//!
//! `ClipView` holds the transient local copy a browsing surface renders
//! from: refreshed on demand, filtered by folder, searched by substring,
//! sorted by time. It performs no persistence of its own: the stored
//! collections change only through the mediator, and a view copy may go
//! stale until the next refresh.

use std::collections::HashMap;

use crate::managers::clip_manager::ClipManagerTrait;
use crate::types::clip::{Clip, Folder};
use crate::types::errors::ClipError;

/// Which clips a browsing surface shows.
#[derive(Debug, Clone, PartialEq)]
pub enum FolderFilter {
    /// Every clip, regardless of folder.
    All,
    /// Only clips filed under this folder id.
    Folder(String),
}

/// Display order, by capture timestamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortOrder {
    NewestFirst,
    OldestFirst,
}

/// Returns true if the clip matches the query, case-insensitively, across
/// text, page title, URL, and folder name. An empty query matches all.
pub fn matches_query(clip: &Clip, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    clip.text.to_lowercase().contains(&query)
        || clip.page_title.to_lowercase().contains(&query)
        || clip.url.to_lowercase().contains(&query)
        || clip.folder_name.to_lowercase().contains(&query)
}

/// Applies folder filter and search query, preserving stored order.
pub fn filter_clips<'a>(clips: &'a [Clip], filter: &FolderFilter, query: &str) -> Vec<&'a Clip> {
    clips
        .iter()
        .filter(|clip| match filter {
            FolderFilter::All => true,
            FolderFilter::Folder(id) => clip.folder_id == *id,
        })
        .filter(|clip| matches_query(clip, query))
        .collect()
}

/// Sorts clips by capture timestamp in the given order.
pub fn sort_clips(clips: &mut [&Clip], order: SortOrder) {
    match order {
        SortOrder::NewestFirst => clips.sort_by(|a, b| b.timestamp.cmp(&a.timestamp)),
        SortOrder::OldestFirst => clips.sort_by(|a, b| a.timestamp.cmp(&b.timestamp)),
    }
}

/// Cached view state for a browsing surface (full view or popup).
pub struct ClipView {
    folders: Vec<Folder>,
    clips: Vec<Clip>,
    folder_filter: FolderFilter,
    sort: SortOrder,
    query: String,
}

impl ClipView {
    /// Creates an empty view: all folders, newest first, no query.
    pub fn new() -> Self {
        Self {
            folders: Vec::new(),
            clips: Vec::new(),
            folder_filter: FolderFilter::All,
            sort: SortOrder::NewestFirst,
            query: String::new(),
        }
    }

    /// Reloads both collections from the mediator, replacing the local copy.
    pub fn refresh(&mut self, mediator: &impl ClipManagerTrait) -> Result<(), ClipError> {
        self.folders = mediator.get_folders()?;
        self.clips = mediator.get_clips()?;
        Ok(())
    }

    pub fn set_folder_filter(&mut self, filter: FolderFilter) {
        self.folder_filter = filter;
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
    }

    /// Sets the search query (matched case-insensitively).
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    /// All folders in the local copy, in stored order.
    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    /// The clips currently visible: filtered, searched, and sorted.
    pub fn visible_clips(&self) -> Vec<&Clip> {
        let mut visible = filter_clips(&self.clips, &self.folder_filter, &self.query);
        sort_clips(&mut visible, self.sort);
        visible
    }

    /// The `count` most recent clips: the head of the stored
    /// most-recent-first order, untouched by filter or sort.
    pub fn recent_clips(&self, count: usize) -> &[Clip] {
        &self.clips[..count.min(self.clips.len())]
    }

    /// Number of clips filed under each folder id. Folders with no clips
    /// have no entry.
    pub fn folder_clip_counts(&self) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for clip in &self.clips {
            *counts.entry(clip.folder_id.clone()).or_insert(0) += 1;
        }
        counts
    }

    pub fn total_clips(&self) -> usize {
        self.clips.len()
    }

    pub fn total_folders(&self) -> usize {
        self.folders.len()
    }
}

impl Default for ClipView {
    fn default() -> Self {
        Self::new()
    }
}
