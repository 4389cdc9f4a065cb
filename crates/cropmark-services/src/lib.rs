//! Cropmark Services - External collaborator contracts
//!
//! The crop planner in `cropmark-core` is pure geometry; everything it is
//! deployed next to (detection, segmentation, embedding, similarity search,
//! blob storage) is an external system consumed as a black box. This crate
//! pins down those contracts as traits, together with the few concrete
//! pieces whose behavior belongs to this codebase rather than the backing
//! system:
//!
//! - `detect` - object detection contract plus the minimum-area filter
//!   applied upstream of segmentation
//! - `segment` - instance segmentation contract plus the minimum-side
//!   filter for unguided masks
//! - `embed` - fixed-length L2-normalized embedding contract
//! - `search` - ranked similarity search, a brute-force in-memory fallback,
//!   and the explicit primary/fallback strategy combining them
//! - `store` - blob retrieval with a size- and time-bounded in-memory cache
//!
//! Services are constructed once at process start and passed by reference
//! into the request-handling layer; none of them hold implicit global state.

pub mod detect;
pub mod embed;
pub mod error;
pub mod search;
pub mod segment;
pub mod store;

pub use detect::{filter_by_min_area, Detection, Detector, MIN_DETECTION_AREA};
pub use embed::{is_unit_norm, l2_normalize, Embedder};
pub use error::ServiceError;
pub use search::{BruteForceSearch, CorpusEntry, FallbackSearch, SearchHit, SimilaritySearch};
pub use segment::{filter_by_min_side, BoxHint, MaskCandidate, Segmenter, MIN_MASK_SIDE};
pub use store::{Blob, BlobStore, BoundedCache, CacheConfig, CachedStore};
