/*!
 * Decoding of POSIX mode bits into `ls -l` style strings
 */

const S_IFMT: u32 = 0o170000;
const S_IFSOCK: u32 = 0o140000;
const S_IFLNK: u32 = 0o120000;
const S_IFREG: u32 = 0o100000;
const S_IFBLK: u32 = 0o060000;
const S_IFDIR: u32 = 0o040000;
const S_IFCHR: u32 = 0o020000;
const S_IFIFO: u32 = 0o010000;

/// Type tests in the order they are tried, with the tag each one yields
const TYPE_TAGS: [(u32, char); 7] = [
    (S_IFDIR, 'd'),
    (S_IFREG, '-'),
    (S_IFLNK, 'l'),
    (S_IFIFO, '|'),
    (S_IFSOCK, 's'),
    (S_IFCHR, 'c'),
    (S_IFBLK, 'b'),
];

/// Permission bits from owner-read down to other-execute
const PERMISSION_BITS: [(u32, char); 9] = [
    (0o400, 'r'),
    (0o200, 'w'),
    (0o100, 'x'),
    (0o040, 'r'),
    (0o020, 'w'),
    (0o010, 'x'),
    (0o004, 'r'),
    (0o002, 'w'),
    (0o001, 'x'),
];

/// Single-character file type tag for a mode
pub fn file_type_tag(mode: u32) -> char {
    TYPE_TAGS
        .iter()
        .find(|(bits, _)| mode & S_IFMT == *bits)
        .map_or('?', |&(_, tag)| tag)
}

/// Render a mode as a 10-character string such as `drwxr-xr-x`
pub fn format_permissions(mode: u32) -> String {
    let mut out = String::with_capacity(10);
    out.push(file_type_tag(mode));
    for &(bit, symbol) in &PERMISSION_BITS {
        out.push(if mode & bit != 0 { symbol } else { '-' });
    }
    out
}

/// Whether any of the owner, group or other execute positions is set
pub fn has_execute_bit(permissions: &str) -> bool {
    [3, 6, 9]
        .iter()
        .any(|&i| permissions.as_bytes().get(i) == Some(&b'x'))
}

/// Whether the type tag marks anything other than a regular file
pub fn is_directory_like(permissions: &str) -> bool {
    !permissions.starts_with('-')
}
