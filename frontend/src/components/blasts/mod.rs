pub mod schedule_form;
