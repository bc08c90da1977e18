use assert_cmd::prelude::*; // Add methods on commands
use predicates::prelude::*; // Used for writing assertions
use std::process::Command; // Run programs
use tempfile;
type STDRESULT = Result<(),Box<dyn std::error::Error>>;

const SOURCE: &str = r#"10 REM SWEEP
20 CLS : ' clear
30 FOR I = 1 TO 10
40 PRINT "X" ; I
50 NEXT I
60 GOTO 20
"#;

const EXPECTED_PACKED: &str = r#"1 REMSWEEP
2 CLS:FORI=1TO10:PRINT"X"I:NEXTI:GOTO2
"#;

const EXPECTED_TOKS: &str = "0C8001008E53574545500026800200B03A8149DD31C131303AA3225822493A82493A883200";

#[test]
fn pack_file() -> STDRESULT {
    let dir = tempfile::tempdir()?;
    let src_path = dir.path().join("SWEEP.TXT");
    let out_path = dir.path().join("SWEEP.DO");
    std::fs::write(&src_path,SOURCE)?;
    let mut cmd = Command::cargo_bin("m100kit")?;
    cmd.arg("pack").arg(&src_path).arg(&out_path)
        .assert()
        .success()
        .stderr(predicate::str::contains("Packed"));
    assert_eq!(std::fs::read_to_string(&out_path)?,EXPECTED_PACKED);
    Ok(())
}

#[test]
fn pack_max_len() -> STDRESULT {
    let dir = tempfile::tempdir()?;
    let src_path = dir.path().join("ABC.TXT");
    let out_path = dir.path().join("ABC.DO");
    std::fs::write(&src_path,"10 A=1\n20 B=2\n30 C=3\n40 D=4\n")?;
    let mut cmd = Command::cargo_bin("m100kit")?;
    cmd.arg("pack").arg(&src_path).arg(&out_path)
        .arg("--max-len").arg("10")
        .assert()
        .success();
    assert_eq!(std::fs::read_to_string(&out_path)?,"1 A=1:B=2\n2 C=3:D=4\n");
    Ok(())
}

#[test]
fn pack_config() -> STDRESULT {
    let dir = tempfile::tempdir()?;
    let src_path = dir.path().join("ABC.TXT");
    let out_path = dir.path().join("ABC.DO");
    std::fs::write(&src_path,"10 A=1\n20 B=2\n30 C=3\n40 D=4\n")?;
    let mut cmd = Command::cargo_bin("m100kit")?;
    cmd.arg("pack").arg(&src_path).arg(&out_path)
        .arg("--config").arg("{\"packer\":{\"maxLineLength\":10}}")
        .assert()
        .success();
    assert_eq!(std::fs::read_to_string(&out_path)?,"1 A=1:B=2\n2 C=3:D=4\n");
    Ok(())
}

#[test]
fn pack_missing_input() -> STDRESULT {
    let dir = tempfile::tempdir()?;
    let out_path = dir.path().join("NONE.DO");
    let mut cmd = Command::cargo_bin("m100kit")?;
    cmd.arg("pack").arg(dir.path().join("NONE.TXT")).arg(&out_path)
        .assert()
        .failure();
    assert!(!out_path.exists());
    Ok(())
}

#[test]
fn pack_no_lines() -> STDRESULT {
    let dir = tempfile::tempdir()?;
    let src_path = dir.path().join("EMPTY.TXT");
    let out_path = dir.path().join("EMPTY.DO");
    std::fs::write(&src_path,"' nothing here\n")?;
    let mut cmd = Command::cargo_bin("m100kit")?;
    cmd.arg("pack").arg(&src_path).arg(&out_path)
        .assert()
        .failure();
    assert!(!out_path.exists());
    Ok(())
}

#[test]
fn tokenize_default_output() -> STDRESULT {
    let dir = tempfile::tempdir()?;
    let src_path = dir.path().join("SWEEP.DO");
    std::fs::write(&src_path,EXPECTED_PACKED)?;
    let mut cmd = Command::cargo_bin("m100kit")?;
    cmd.arg("tokenize").arg(&src_path)
        .assert()
        .success();
    let img = std::fs::read(dir.path().join("SWEEP.BA"))?;
    assert_eq!(hex::encode_upper(img),EXPECTED_TOKS);
    Ok(())
}

#[test]
fn tokenize_tandy_200() -> STDRESULT {
    let dir = tempfile::tempdir()?;
    let src_path = dir.path().join("LOOP.DO");
    let out_path = dir.path().join("LOOP.BA");
    std::fs::write(&src_path,"10 CLS\n20 GOTO 10\n")?;
    let mut cmd = Command::cargo_bin("m100kit")?;
    cmd.arg("tok").arg(&src_path).arg(&out_path)
        .arg("--model").arg("t200")
        .assert()
        .success();
    assert_eq!(hex::encode_upper(std::fs::read(&out_path)?),"07A00A00B00010A014008820313000");
    Ok(())
}

#[test]
fn tokenize_explicit_base() -> STDRESULT {
    let dir = tempfile::tempdir()?;
    let src_path = dir.path().join("LOOP.DO");
    let out_path = dir.path().join("LOOP.BA");
    std::fs::write(&src_path,"10 CLS\n20 GOTO 10\n")?;
    let mut cmd = Command::cargo_bin("m100kit")?;
    // stdout is a pipe here, so the console dump is the raw image
    let piped = cmd.arg("tokenize").arg(&src_path).arg(&out_path).arg("0xA001")
        .arg("--console")
        .assert()
        .success()
        .get_output().stdout.clone();
    assert_eq!(hex::encode_upper(&piped),"07A00A00B00010A014008820313000");
    assert_eq!(hex::encode_upper(std::fs::read(&out_path)?),"07A00A00B00010A014008820313000");
    Ok(())
}

#[test]
fn tokenize_invalid_base() -> STDRESULT {
    let dir = tempfile::tempdir()?;
    let src_path = dir.path().join("LOOP.DO");
    let out_path = dir.path().join("LOOP.BA");
    std::fs::write(&src_path,"10 CLS\n")?;
    let mut cmd = Command::cargo_bin("m100kit")?;
    cmd.arg("tokenize").arg(&src_path).arg(&out_path).arg("0x10000")
        .assert()
        .failure();
    assert!(!out_path.exists());
    Ok(())
}

#[test]
fn tokenize_missing_input() -> STDRESULT {
    let dir = tempfile::tempdir()?;
    let mut cmd = Command::cargo_bin("m100kit")?;
    cmd.arg("tokenize").arg(dir.path().join("NONE.DO"))
        .assert()
        .failure();
    assert!(!dir.path().join("NONE.BA").exists());
    Ok(())
}

#[test]
fn detokenize_file() -> STDRESULT {
    let dir = tempfile::tempdir()?;
    let img_path = dir.path().join("SWEEP.BA");
    std::fs::write(&img_path,hex::decode(EXPECTED_TOKS)?)?;
    let mut cmd = Command::cargo_bin("m100kit")?;
    cmd.arg("dtok").arg(&img_path)
        .assert()
        .success()
        .stdout(EXPECTED_PACKED);
    Ok(())
}

#[test]
fn no_subcommand() -> STDRESULT {
    let mut cmd = Command::cargo_bin("m100kit")?;
    cmd.assert().failure();
    Ok(())
}
