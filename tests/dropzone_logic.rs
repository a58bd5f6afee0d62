//! Integration tests over the pure, browser-free surface of the crate:
//! configuration defaults, message formatting, accept matching, and
//! notification gating.

use leptos::prelude::Callable;
use leptos_dropzone::components::{file_accepted, partition_details};
use leptos_dropzone::config::{
    default_drop_reject_message, default_file_added_message,
};
use leptos_dropzone::{
    convert_bytes_to_mbs_or_kbs, matches_accept, DialogConfig, DropzoneConfig, FileDetails,
    Severity, ShowAlerts,
};

#[test]
fn standalone_and_dialog_configs_disagree_only_on_preview_placement() {
    let standalone = DropzoneConfig::default();
    let dialog = DropzoneConfig::for_dialog();

    assert!(standalone.show_previews_in_dropzone && !standalone.show_previews);
    assert!(dialog.show_previews && !dialog.show_previews_in_dropzone);
    assert!(dialog.show_file_names_in_preview);

    assert_eq!(standalone.files_limit, dialog.files_limit);
    assert_eq!(standalone.max_file_size, dialog.max_file_size);
    assert_eq!(standalone.dropzone_text, dialog.dropzone_text);
}

#[test]
fn default_formatters_match_their_documented_output() {
    let config = DropzoneConfig::default();

    assert_eq!(
        config.get_file_limit_exceed_message.run(3),
        "Maximum allowed number of files exceeded. Only 3 allowed"
    );
    assert_eq!(
        config.get_file_added_message.run("cat.png".into()),
        "File cat.png successfully added."
    );
    assert_eq!(
        config.get_file_removed_message.run("cat.png".into()),
        "File cat.png removed."
    );
}

#[test]
fn reject_formatter_reports_both_type_and_size_violations() {
    let config = DropzoneConfig {
        accepted_files: vec!["image/*".into()],
        max_file_size: 3_000_000,
        ..DropzoneConfig::default()
    };
    let oversize_wrong_type = FileDetails::new("movie.mp4", "video/mp4", 5_000_000);

    let message = config.get_drop_reject_message.run((
        oversize_wrong_type,
        config.accepted_files.clone(),
        config.max_file_size,
    ));

    assert!(message.contains("File type not supported."));
    assert!(message.contains("File is too big."));
    assert!(message.contains("2.9 MB"));
}

#[test]
fn success_message_concatenates_per_file_fragments_in_order() {
    // The widget builds the batch message exactly like this: one fragment
    // per file, in drop order.
    let names = ["a.png", "b.png", "c.png"];
    let message: String = names
        .iter()
        .map(|name| default_file_added_message(name.to_string()))
        .collect();
    assert_eq!(
        message,
        "File a.png successfully added.File b.png successfully added.File c.png successfully added."
    );
}

#[test]
fn oversize_files_are_partitioned_out_not_partially_accepted() {
    let accepted_list: Vec<String> = vec!["image/*".into()];
    let batch = vec![
        FileDetails::new("ok.png", "image/png", 1_000),
        FileDetails::new("big.png", "image/png", 5_000_000),
        FileDetails::new("clip.mp4", "video/mp4", 1_000),
    ];

    let (accepted, rejected) = partition_details(batch, &accepted_list, 3_000_000, true);

    assert_eq!(accepted.len(), 1);
    assert_eq!(accepted[0].name, "ok.png");
    assert_eq!(rejected.len(), 2);
    assert!(rejected
        .iter()
        .all(|entry| !file_accepted(entry, &accepted_list, 3_000_000)));
}

#[test]
fn single_file_mode_rejects_a_multi_file_drop_even_when_each_file_is_valid() {
    let batch = vec![
        FileDetails::new("a.png", "image/png", 100),
        FileDetails::new("b.png", "image/png", 100),
    ];
    let (accepted, rejected) = partition_details(batch, &[], 3_000_000, false);
    assert!(accepted.is_empty());
    assert_eq!(rejected.len(), 2);
}

#[test]
fn reject_formatter_skips_type_fragment_when_accept_list_is_empty() {
    let details = FileDetails::new("big.bin", "application/octet-stream", 10);
    let message = default_drop_reject_message(&details, &[], 3_000_000);
    assert_eq!(message, "File big.bin was rejected. ");
}

#[test]
fn byte_formatter_uses_binary_scaling() {
    assert_eq!(convert_bytes_to_mbs_or_kbs(500), "500 bytes");
    assert_eq!(convert_bytes_to_mbs_or_kbs(1_000_000), "976.6 KB");
    assert_eq!(convert_bytes_to_mbs_or_kbs(3_000_000), "2.9 MB");
}

#[test]
fn accept_matching_covers_mime_wildcard_and_extension_entries() {
    let accepted: Vec<String> = vec!["image/*".into(), "application/pdf".into(), ".csv".into()];
    assert!(matches_accept("image/webp", "photo.webp", &accepted));
    assert!(matches_accept("application/pdf", "doc.pdf", &accepted));
    assert!(matches_accept("text/csv", "data.CSV", &accepted));
    assert!(!matches_accept("video/mp4", "clip.mp4", &accepted));
}

#[test]
fn alert_gate_accepts_bool_and_severity_lists() {
    assert!(ShowAlerts::from(true).allows(Severity::Success));
    assert!(!ShowAlerts::from(false).allows(Severity::Success));

    let errors_only = ShowAlerts::from(vec![Severity::Error]);
    assert!(errors_only.allows(Severity::Error));
    assert!(!errors_only.allows(Severity::Success));
    assert!(!errors_only.allows(Severity::Info));
}

#[test]
fn dialog_defaults_match_the_documented_chrome() {
    let dialog = DialogConfig::default();
    assert_eq!(dialog.title, "Upload file");
    assert_eq!(dialog.max_width, "600px");
    assert_eq!(dialog.cancel_button_text, "Cancel");
    assert_eq!(dialog.submit_button_text, "Submit");
}
