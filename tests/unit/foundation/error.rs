use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        LogoError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(LogoError::text("x").to_string().contains("text error:"));
    assert!(LogoError::render("x").to_string().contains("render error:"));
    assert!(
        LogoError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn io_errors_convert_and_keep_their_message() {
    fn open_missing() -> LogoResult<std::fs::File> {
        Ok(std::fs::File::open("/definitely/not/here.json")?)
    }
    let err = open_missing().unwrap_err();
    assert!(matches!(&err, LogoError::Io(e) if e.kind() == std::io::ErrorKind::NotFound));

    let err = LogoError::from(std::io::Error::other("disk"));
    assert!(err.to_string().contains("disk"));
}
