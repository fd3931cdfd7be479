use super::*;

const TTL: Duration = Duration::from_secs(30);

#[test]
fn fresh_cache_never_expires() {
	let mut cache = SearchCache::new(TTL);
	assert!(!cache.expire(Instant::now() + Duration::from_secs(3600)));
}

#[test]
fn entries_survive_inside_window() {
	let start = Instant::now();
	let mut cache = SearchCache::new(TTL);
	cache.insert("bug".into(), SearchOutcome::Cancelled, start);

	assert!(!cache.expire(start + Duration::from_secs(29)));
	assert_eq!(cache.get("bug"), Some(&SearchOutcome::Cancelled));
}

#[test]
fn whole_cache_is_wiped_together() {
	let start = Instant::now();
	let mut cache = SearchCache::new(TTL);
	cache.insert("old".into(), SearchOutcome::Cancelled, start);
	cache.insert("new".into(), SearchOutcome::Cancelled, start + Duration::from_secs(20));

	// "old" is 35s old but the shared epoch is the latest write.
	assert!(!cache.expire(start + Duration::from_secs(35)));
	assert!(cache.contains("old"));

	assert!(cache.expire(start + Duration::from_secs(50)));
	assert!(cache.is_empty());
	assert!(!cache.expire(start + Duration::from_secs(100)));
}
