pub mod d400_knowledge_base;
