use clap::Args;
use pcset::PcSet;

#[derive(Args)]
pub(crate) struct NotationOptions {
    /// Print note names (C = 0) instead of pitch class numbers
    #[arg(long = "notes")]
    notes: bool,

    /// Print note names spelled with sharps
    #[arg(long = "sharps", conflicts_with = "flats")]
    sharps: bool,

    /// Print note names spelled with flats
    #[arg(long = "flats")]
    flats: bool,
}

impl NotationOptions {
    pub fn format(&self, set: &PcSet) -> String {
        if set.is_empty() {
            return format_numbers(set);
        }
        if self.sharps {
            format!("{:+}", set.note_names())
        } else if self.flats {
            format!("{:-}", set.note_names())
        } else if self.notes {
            set.note_names().to_string()
        } else {
            format_numbers(set)
        }
    }
}

/// Renders `set` as a bracketed list which can be passed back to any subcommand.
pub fn format_numbers(set: &PcSet) -> String {
    let pcs = set
        .pcs()
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{pcs}]")
}

/// Renders `set` in compact digit notation, e.g. `[01347]`.
pub fn format_compact(set: &PcSet) -> String {
    if set.is_empty() {
        "[]".to_owned()
    } else {
        format!("[{set}]")
    }
}
