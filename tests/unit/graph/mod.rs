mod cover;
