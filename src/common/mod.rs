pub mod hubbard;
