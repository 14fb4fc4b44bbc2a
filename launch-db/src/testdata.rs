//! Shared sample data for unit tests.

/// Twelve launches across all four sites.
///
/// Per site (launches / successes):
/// - CCAFS LC-40: 4 / 1
/// - CCAFS SLC-40: 2 / 1
/// - KSC LC-39A: 4 / 3
/// - VAFB SLC-4E: 2 / 1
pub const SAMPLE_CSV: &str = "\
,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,2,CCAFS LC-40,0,525.0,F9 v1.0  B0005,v1.0
2,3,CCAFS LC-40,1,3170.0,F9 v1.1  B1011,v1.1
3,4,CCAFS LC-40,0,4428.0,F9 v1.1  B1012,v1.1
4,5,VAFB SLC-4E,0,500.0,F9 v1.1  B1003,v1.1
5,6,VAFB SLC-4E,1,9600.0,F9 FT B1036.1,FT
6,7,KSC LC-39A,1,2490.0,F9 FT B1031.1,FT
7,8,KSC LC-39A,1,5300.0,F9 FT B1032.1,FT
8,9,KSC LC-39A,0,5200.0,F9 FT B1034,FT
9,10,KSC LC-39A,1,3136.0,F9 B4 B1041.1,B4
10,11,CCAFS SLC-40,1,2205.0,F9 FT B1038.2,FT
11,12,CCAFS SLC-40,0,9600.0,F9 B4 B1039.2,B4
";
