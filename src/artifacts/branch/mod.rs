pub mod branch_name;
pub mod revision;

/// Ref-name rules: no leading `.` or `/`, no `/.`, `..`, `@{`, trailing `/`
/// or `.lock`, and no control, space or `*:?[\~^` characters.
pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\/\.|\.\.|^\/|\/$|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";
