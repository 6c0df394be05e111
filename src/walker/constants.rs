// Constants for the string walker

/// The literal walked by the `strwalk` binary
pub const PANGRAM: &str = "The quick brown fox jumps over the lazy dog";

/// Starting address for interned string literals
/// Read-only data starts at 0x00400000 to keep it well clear of the null page
pub const RODATA_ADDRESS_START: u64 = 0x0040_0000;

/// Interned literals start on 8-byte boundaries
pub const RODATA_ALIGN: u64 = 8;

/// Printed in the header where the never-assigned cursor would go
pub const UNSET_PLACEHOLDER: &str = "n/a";
