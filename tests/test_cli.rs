use clap::Parser;
use stickypad::cli::args::{Args, Command};

#[test]
fn given_no_subcommand_when_parsing_then_fails() {
    // Arrange
    let args = vec!["stickypad", "42"];

    // Act & Assert
    let result = Args::try_parse_from(args);
    assert!(result.is_err(), "Should fail without subcommand");
}

#[test]
fn given_list_command_when_parsing_then_succeeds() {
    // Arrange
    let args = vec!["stickypad", "list"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::List { search } => {
            assert_eq!(search, None);
        }
        _ => panic!("Expected List command"),
    }
    assert_eq!(parsed.file, None);
    assert_eq!(parsed.image_dir, None);
}

#[test]
fn given_list_with_search_term_when_parsing_then_captures_it() {
    // Arrange
    let args = vec!["stickypad", "list", "groceries"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::List { search } => {
            assert_eq!(search, Some("groceries".to_string()));
        }
        _ => panic!("Expected List command"),
    }
}

#[test]
fn given_show_command_when_parsing_then_succeeds() {
    // Arrange
    let args = vec!["stickypad", "show", "42"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Show { note_id, json } => {
            assert_eq!(note_id, "42");
            assert_eq!(json, false);
        }
        _ => panic!("Expected Show command"),
    }
}

#[test]
fn given_json_flag_when_parsing_show_command_then_json_is_true() {
    // Arrange
    let args = vec!["stickypad", "show", "--json", "42"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Show { note_id, json } => {
            assert_eq!(note_id, "42");
            assert_eq!(json, true);
        }
        _ => panic!("Expected Show command"),
    }
}

#[test]
fn given_delete_command_when_parsing_then_prompt_is_kept() {
    // Arrange
    let args = vec!["stickypad", "delete", "42"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Delete { note_id, yes } => {
            assert_eq!(note_id, "42");
            assert_eq!(yes, false);
        }
        _ => panic!("Expected Delete command"),
    }
}

#[test]
fn given_yes_flag_when_parsing_delete_command_then_prompt_is_skipped() {
    // Arrange
    let args = vec!["stickypad", "delete", "-y", "42"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Delete { note_id, yes } => {
            assert_eq!(note_id, "42");
            assert_eq!(yes, true);
        }
        _ => panic!("Expected Delete command"),
    }
}

#[test]
fn given_gc_command_when_parsing_then_succeeds() {
    // Arrange
    let args = vec!["stickypad", "gc"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert!(matches!(parsed.command, Command::Gc));
}

#[test]
fn given_global_file_flag_when_parsing_then_succeeds() {
    // Arrange
    let args = vec!["stickypad", "-f", "/path/to/sticky_notes.json", "list"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert_eq!(
        parsed.file,
        Some(std::path::PathBuf::from("/path/to/sticky_notes.json"))
    );
    assert_eq!(parsed.image_dir, None);
}

#[test]
fn given_file_flag_after_subcommand_when_parsing_then_succeeds() {
    // Arrange - global flags work anywhere when marked as global
    let args = vec![
        "stickypad",
        "delete",
        "-f",
        "/path/to/sticky_notes.json",
        "42",
    ];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Delete { note_id, yes } => {
            assert_eq!(note_id, "42");
            assert_eq!(yes, false);
        }
        _ => panic!("Expected Delete command"),
    }
    assert_eq!(
        parsed.file,
        Some(std::path::PathBuf::from("/path/to/sticky_notes.json"))
    );
}

#[test]
fn given_image_dir_flag_when_parsing_then_succeeds() {
    // Arrange
    let args = vec!["stickypad", "--image-dir", "/srv/note_images", "gc"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert!(matches!(parsed.command, Command::Gc));
    assert_eq!(
        parsed.image_dir,
        Some(std::path::PathBuf::from("/srv/note_images"))
    );
}

#[test]
fn given_verbose_flag_when_parsing_then_increments_count() {
    // Arrange
    let args = vec!["stickypad", "-vv", "list"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert_eq!(parsed.verbose, 2);
}

#[test]
fn given_show_with_global_flags_when_parsing_then_both_sides_parse() {
    // Arrange
    let args = vec!["stickypad", "-v", "show", "--json", "42"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Show { note_id, json } => {
            assert_eq!(note_id, "42");
            assert_eq!(json, true);
        }
        _ => panic!("Expected Show command"),
    }
    assert_eq!(parsed.verbose, 1);
}
