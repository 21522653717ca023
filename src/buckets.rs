//! Bucket and task data model
//!
//! A bucket is a named category holding an ordered list of tasks. Tasks are
//! plain strings identified only by their position. Display styles are not
//! stored here; they live in [`crate::ui::theme::Theme`].

use crate::config::BucketConfig;

/// A named task category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub name: String,
    /// Key that selects this bucket in navigation mode
    pub key: char,
    pub tasks: Vec<String>,
}

impl Bucket {
    pub fn new(name: impl Into<String>, key: char, tasks: Vec<String>) -> Self {
        Self {
            name: name.into(),
            key,
            tasks,
        }
    }
}

/// Ordered collection of buckets with unique names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BucketSet {
    buckets: Vec<Bucket>,
}

impl BucketSet {
    pub fn new(buckets: Vec<Bucket>) -> Self {
        Self { buckets }
    }

    /// Build the initial buckets from configuration
    pub fn from_config(configs: &[BucketConfig]) -> Self {
        Self::new(
            configs
                .iter()
                .map(|c| Bucket::new(c.name.clone(), c.key, c.tasks.clone()))
                .collect(),
        )
    }

    pub fn get(&self, name: &str) -> Option<&Bucket> {
        self.buckets.iter().find(|b| b.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Bucket> {
        self.buckets.iter_mut().find(|b| b.name == name)
    }

    /// Find the bucket bound to a navigation key
    pub fn by_key(&self, key: char) -> Option<&Bucket> {
        self.buckets.iter().find(|b| b.key == key)
    }

    /// Tasks of a bucket, empty when the bucket does not exist
    pub fn tasks(&self, name: &str) -> &[String] {
        self.get(name).map(|b| b.tasks.as_slice()).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BucketSet {
        BucketSet::new(vec![
            Bucket::new("work", 'w', vec!["a".to_string(), "b".to_string()]),
            Bucket::new("academic", 'e', vec![]),
        ])
    }

    #[test]
    fn test_lookup_by_name_and_key() {
        let set = sample();
        assert_eq!(set.get("work").map(|b| b.key), Some('w'));
        assert_eq!(set.by_key('e').map(|b| b.name.as_str()), Some("academic"));
        assert!(set.by_key('x').is_none());
    }

    #[test]
    fn test_missing_bucket_has_no_tasks() {
        let set = sample();
        assert!(set.tasks("nope").is_empty());
        assert_eq!(set.tasks("work").len(), 2);
    }
}
