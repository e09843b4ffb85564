pub mod csv_preview;
