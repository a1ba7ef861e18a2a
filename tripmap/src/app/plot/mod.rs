mod run;

pub use run::{plot_and_save, run_trip_plot};
