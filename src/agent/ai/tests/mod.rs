// Cross-checks between the pruned search and brute force
