/*!
# bomstrip

Detects and removes Byte Order Marks (BOMs) from text-based files, one file
at a time or across a directory tree.

## Supported encodings

| Identifier | Signature  |
|------------|------------|
| `utf-8`    | `EF BB BF` |
| `utf-16le` | `FF FE`    |
| `utf-16be` | `FE FF`    |

The signature is removed entirely or the file is left byte-for-byte
unchanged; a file without a BOM is never written to.

## CLI

```bash
# Single file
bomstrip --file notes.txt

# Whole tree
bomstrip --directory ./src --encoding utf-16le --recursive
```

## Library

```rust
use bomstrip::{strip_bom, BomEncoding};

let input = b"\xEF\xBB\xBFHello";
assert_eq!(strip_bom(input, BomEncoding::Utf8), Some(&b"Hello"[..]));
```
*/

pub mod cli_common;
pub mod core;

pub use crate::core::{
    process_file, strip_bom, walk_directory, BomEncoding, Error, StripOutcome, WalkSummary,
};
