//! Slug allocation scenarios against the in-memory directory.

use spinhub::{MemorySlugDirectory, SlugGenerator};

#[tokio::test]
async fn test_allocation_against_a_directory() {
    let directory = MemorySlugDirectory::new();
    let generator = SlugGenerator::new();

    let first = generator
        .allocate("Acme Motors", &directory)
        .await
        .expect("allocate");
    assert_eq!(first.as_str(), "acme-motors");
    // Allocation probes but does not persist; that is the caller's job.
    directory.insert(first.as_str());

    let second = generator
        .allocate("Acme Motors", &directory)
        .await
        .expect("allocate");
    assert_ne!(second, first);
    assert!(second.as_str().starts_with("acme-motors-"));
}
