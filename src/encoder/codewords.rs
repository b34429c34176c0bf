use crate::encoder::reed_solomon::ReedSolomonEncoder;
use crate::encoder::tables::BlockLayout;

/// Split `data` into blocks, append Reed-Solomon EC to each and interleave.
///
/// Data codewords are taken column by column across blocks (short blocks
/// run out one column early), followed by the EC codewords in the same order.
pub fn assemble(data: &[u8], layout: &BlockLayout) -> Vec<u8> {
    debug_assert_eq!(data.len(), layout.data_codewords());

    let num_blocks = layout.num_blocks();
    let rs = ReedSolomonEncoder::new(layout.ecc_per_block);

    let mut data_blocks: Vec<&[u8]> = Vec::with_capacity(num_blocks);
    let mut ecc_blocks: Vec<Vec<u8>> = Vec::with_capacity(num_blocks);
    let mut offset = 0;
    for b in 0..num_blocks {
        let len = layout.data_len(b);
        let block = &data[offset..offset + len];
        ecc_blocks.push(rs.encode(block));
        data_blocks.push(block);
        offset += len;
    }

    let mut result = Vec::with_capacity(layout.total_codewords());
    let long_len = layout.data_len(num_blocks - 1);
    for i in 0..long_len {
        for block in &data_blocks {
            if let Some(&codeword) = block.get(i) {
                result.push(codeword);
            }
        }
    }
    for i in 0..layout.ecc_per_block {
        for ecc in &ecc_blocks {
            result.push(ecc[i]);
        }
    }
    result
}
