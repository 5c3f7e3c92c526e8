pub mod d402_parts_tracking;
