/// Bit vector construction, rendering and parsing.
pub mod bits;


/// Two's-complement encode/decode and extension.
pub mod twos_complement;
