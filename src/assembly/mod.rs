pub mod overlap;
pub mod session;

pub use overlap::{
    assemble, assemble_str, assemble_with, check_assembly, compute_overlap, compute_overlap_str,
    compute_overlap_with, hint, hint_str, OverlapPolicy,
};
pub use session::AssemblySession;
