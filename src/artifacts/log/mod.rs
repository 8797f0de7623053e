pub mod rev_list;
