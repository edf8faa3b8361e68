mod doubly;
